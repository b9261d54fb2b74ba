//! Paged Table Example
//!
//! This example drives a table the way a UI session would:
//! - columns and page geometry come from YAML
//! - user input pages, filters and sorts the rows
//! - rows holding a resource are released when a page is replaced
//!
//! Run with `RUST_LOG=this_table=debug` to see every reload.

use anyhow::Result;
use this_table::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
struct Employee {
    id: Uuid,
    name: String,
    department: String,
    age: u32,
    remote: bool,
}

impl_record!(Employee, {
    "Name" => name,
    "Department" => department,
    "Age" => age,
    "Remote" => remote,
});

/// A rendered row, as a UI binding layer would hold it
struct EmployeeRow {
    id: Uuid,
    label: String,
}

impl EmployeeRow {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            label: format!(
                "{:<10} {:<12} {:>3} {}",
                employee.name,
                employee.department,
                employee.age,
                if employee.remote { "remote" } else { "office" }
            ),
        }
    }
}

impl Release for EmployeeRow {
    fn release(&mut self) -> Result<()> {
        tracing::trace!(id = %self.id, "Released row binding");
        Ok(())
    }
}

const TABLE_YAML: &str = r#"
columns:
  - property_name: Name
    is_sortable: true
    is_filterable: true
  - property_name: Department
    is_filterable: true
  - property_name: Age
    display_name: Age (years)
    is_sortable: true
  - property_name: Remote
    is_filterable: true
page_size: 5
max_page_size: 25
order:
  property_name: Name
  direction: asc
"#;

fn employees() -> Vec<Employee> {
    const NAMES: [&str; 8] = ["Ann", "Tom", "Amanda", "Bob", "Eve", "Joan", "Max", "Zoe"];
    const DEPARTMENTS: [&str; 3] = ["Sales", "Engineering", "Support"];

    (0..40u32)
        .map(|i| Employee {
            id: Uuid::new_v4(),
            name: format!("{}{}", NAMES[i as usize % NAMES.len()], i / 8),
            department: DEPARTMENTS[i as usize % DEPARTMENTS.len()].to_string(),
            age: 22 + (i * 7) % 40,
            remote: i % 3 == 0,
        })
        .collect()
}

fn print_page(title: &str, table: &DataTable<EmployeeRow>) {
    let info = table.page_info();
    println!(
        "\n== {} (page {}/{}, {} of {} rows)",
        title,
        info.page_index + 1,
        info.pages_count.max(1),
        info.page_rows,
        info.total_rows
    );
    let header: Vec<&str> = table.columns().iter().map(|c| c.label()).collect();
    println!("   {}", header.join(" | "));
    for row in table.rows() {
        println!("   {}", row.label);
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = TableConfig::from_yaml_str(TABLE_YAML)?;

    let mut table = DataTableBuilder::new()
        .with_releasing_data_source(employees(), EmployeeRow::from_employee)
        .with_config(&config)
        .on_page_loaded(|info| {
            tracing::info!(
                page_index = info.page_index,
                total_rows = info.total_rows,
                "Page loaded"
            )
        })
        .build()?;

    print_page("Initial", &table);

    table.set_page_index(3)?;
    print_page("Jump to page 4", &table);

    table.set_page_index(100)?;
    print_page("Past the end", &table);

    table.set_column_filter("Department", "Eng")?;
    print_page("Department contains 'Eng'", &table);

    table.set_column_filter("Remote", "true")?;
    table.set_column_sort("Age", "desc")?;
    print_page("Remote engineers by age", &table);

    // Malformed input is ignored
    table.set_column_sort("Age", "sideways")?;
    table.set_column_filter("Age", "30")?;
    table.set_page_size(-4)?;

    table.set_column_filter("Department", "")?;
    table.set_column_filter("Remote", "")?;
    table.set_page_size(10)?;
    print_page("All rows, 10 per page", &table);

    println!("\nPages cached: {}", table.pages().len());

    table.teardown();
    match table.set_page_index(0) {
        Err(TableError::Disposed) => println!("Table torn down"),
        other => println!("Unexpected: {other:?}"),
    }

    Ok(())
}

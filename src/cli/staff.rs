use crate::store::Store;
use crate::types::validate_staff_name;

use super::init_store;

pub fn run_staff_add(data_dir: String, name: String) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;

    let name = validate_staff_name(&name)?;
    let member = store.create_staff(name)?;

    println!("Added staff member \"{}\" (id {})", member.name, member.id);
    Ok(())
}

pub fn run_staff_list(data_dir: String, json: bool) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;
    let staff = store.list_staff()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&staff)?);
        return Ok(());
    }

    if staff.is_empty() {
        println!("No staff members. Add one with 'kpi-tracker staff add --name <NAME>'.");
        return Ok(());
    }

    println!("{:>6}  NAME", "ID");
    for member in &staff {
        println!("{:>6}  {}", member.id, member.name);
    }
    Ok(())
}

pub fn run_staff_remove(data_dir: String, id: i64) -> anyhow::Result<()> {
    let store = init_store(&data_dir)?;

    let member = store
        .get_staff(id)?
        .ok_or_else(|| anyhow::anyhow!("Staff member not found: {}", id))?;

    store.delete_staff(id)?;

    println!("Removed staff member \"{}\"", member.name);
    Ok(())
}

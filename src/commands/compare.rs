use crate::error::Result;
use crate::utils::update_check::compare_versions;
use std::cmp::Ordering;

pub fn run(left: &str, right: &str) -> Result<()> {
    println!("{}", symbol(compare_versions(left, right)));
    Ok(())
}

fn symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

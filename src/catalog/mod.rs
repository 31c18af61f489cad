//! Static studio catalog: gear for the equipment showcase and released
//! projects for the portfolio. Loaded once at startup, read-only after.

pub mod equipment;
pub mod projects;

pub use equipment::Equipment;
pub use projects::Project;

/// Read-only lookup tables behind explicit Option lookups.
/// Unknown ids are a normal outcome, not an error.
pub struct Catalog {
    equipment: Vec<Equipment>,
    projects: Vec<Project>,
}

impl Catalog {
    pub fn load() -> Self {
        Self {
            equipment: equipment::stock_list(),
            projects: projects::released_list(),
        }
    }

    pub fn equipment(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find_equipment(&self, id: &str) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.id == id)
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        let catalog = Catalog::load();
        assert!(catalog.find_equipment("neumann-u87").is_some());
        assert!(catalog.find_project("synthwave-dreams").is_some());
    }

    #[test]
    fn unknown_ids_return_none() {
        let catalog = Catalog::load();
        assert!(catalog.find_equipment("behringer-um2").is_none());
        assert!(catalog.find_project("lost-tapes").is_none());
    }

    #[test]
    fn spec_rows_keep_declaration_order() {
        let catalog = Catalog::load();
        let u87 = catalog.find_equipment("neumann-u87").unwrap();
        assert_eq!(u87.specs[0].0, "Polar Patterns");
        assert_eq!(u87.specs.last().unwrap().0, "Max SPL");
    }
}

//! Query documents for the `users` collection.

use crate::model::Department;
use mongodb::bson::{doc, Document};

pub fn by_department(department: Department) -> Document {
    doc! { "department": department.as_str() }
}

pub fn set_first_name(first_name: &str) -> Document {
    doc! { "$set": { "firstName": first_name } }
}

#[cfg(test)]
mod tests {
    use super::{by_department, set_first_name};
    use crate::model::Department;
    use mongodb::bson::doc;

    #[test]
    fn department_filter_uses_stored_value() {
        assert_eq!(by_department(Department::B), doc! { "department": "b" });
    }

    #[test]
    fn first_name_update_only_sets_first_name() {
        assert_eq!(
            set_first_name("Quincy"),
            doc! { "$set": { "firstName": "Quincy" } }
        );
    }
}

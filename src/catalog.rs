//! Builtin entity catalog.
//!
//! One static definition per collection: dispatch key, backing file, and the
//! required-field set enforced at create/replace time. Anything beyond these
//! fields is schema-light and stored verbatim.

/// Static definition of one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDef {
    /// Singular label used in error messages, e.g. "student".
    pub name: &'static str,
    /// Collection key used for dispatch, e.g. "students".
    pub collection: &'static str,
    /// Backing file name inside the data directory.
    pub file_name: &'static str,
    /// Fields that must be present and truthy at create/replace time.
    pub required: &'static [&'static str],
}

/// Every builtin collection.
pub const ENTITIES: &[EntityDef] = &[
    EntityDef {
        name: "student",
        collection: "students",
        file_name: "students.json",
        required: &["name", "age"],
    },
    EntityDef {
        name: "teacher",
        collection: "teachers",
        file_name: "teachers.json",
        required: &["name", "school_disciplines", "contact", "phone_number", "status"],
    },
    EntityDef {
        name: "professional",
        collection: "professionals",
        file_name: "professionals.json",
        required: &["name", "specialty", "contact", "phone_number", "status"],
    },
    EntityDef {
        name: "event",
        collection: "events",
        file_name: "events.json",
        required: &["title", "date", "location"],
    },
    EntityDef {
        name: "appointment",
        collection: "appointments",
        file_name: "appointments.json",
        required: &["specialty", "comments", "date", "student", "professional"],
    },
    EntityDef {
        name: "user",
        collection: "users",
        file_name: "users.json",
        required: &["name", "email", "user", "pwd", "level", "status"],
    },
];

/// Looks up a builtin entity by collection key.
pub fn by_collection(collection: &str) -> Option<&'static EntityDef> {
    ENTITIES.iter().find(|def| def.collection == collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_all_six_collections() {
        let collections: Vec<&str> = ENTITIES.iter().map(|def| def.collection).collect();
        assert_eq!(
            collections,
            vec![
                "students",
                "teachers",
                "professionals",
                "events",
                "appointments",
                "users"
            ]
        );
    }

    #[test]
    fn lookup_by_collection() {
        let def = by_collection("professionals").unwrap();
        assert_eq!(def.name, "professional");
        assert_eq!(def.file_name, "professionals.json");
        assert!(def.required.contains(&"specialty"));

        assert!(by_collection("heros").is_none());
    }

    #[test]
    fn appointments_require_both_participants() {
        let def = by_collection("appointments").unwrap();
        assert!(def.required.contains(&"student"));
        assert!(def.required.contains(&"professional"));
    }
}

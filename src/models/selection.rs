//! The four categorical fields a prompt is composed from.

/// One of the four selection fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Application,
    Operation,
    Domain,
    Department,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Application,
        Field::Operation,
        Field::Domain,
        Field::Department,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Field::Application => "Application",
            Field::Operation => "Operation",
            Field::Domain => "Domain",
            Field::Department => "Department",
        }
    }

    /// Position in `Field::ALL`
    pub fn index(&self) -> usize {
        match self {
            Field::Application => 0,
            Field::Operation => 1,
            Field::Domain => 2,
            Field::Department => 3,
        }
    }
}

/// Current values of the four fields. An empty string means unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub application: String,
    pub operation: String,
    pub domain: String,
    pub department: String,
}

impl Selection {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Application => &self.application,
            Field::Operation => &self.operation,
            Field::Domain => &self.domain,
            Field::Department => &self.department,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Application => self.application = value,
            Field::Operation => self.operation = value,
            Field::Domain => self.domain = value,
            Field::Department => self.department = value,
        }
    }

    /// Fields still unselected, in display order
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_incomplete() {
        let selection = Selection::default();
        assert!(!selection.is_complete());
        assert_eq!(selection.missing_fields(), Field::ALL.to_vec());
    }

    #[test]
    fn test_set_and_get_round_through_fields() {
        let mut selection = Selection::default();
        selection.set(Field::Domain, "Finance");
        assert_eq!(selection.get(Field::Domain), "Finance");
        assert_eq!(selection.domain, "Finance");
    }

    #[test]
    fn test_whitespace_counts_as_unselected() {
        let selection = Selection {
            application: "CRM".into(),
            operation: "Schema".into(),
            domain: "   ".into(),
            department: "Sales".into(),
        };
        assert_eq!(selection.missing_fields(), vec![Field::Domain]);
    }

    #[test]
    fn test_field_index_matches_all_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}

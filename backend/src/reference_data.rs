/// Provider of the option lists offered in filters and forms.
pub trait ReferenceData: Send + Sync {
    fn concept_classes(&self) -> &[String];
    fn datatypes(&self) -> &[String];
    /// `(code, name)` pairs.
    fn locales(&self) -> &[(String, String)];

    /// Human-readable name of a facet value, when one is known.
    fn option_name(&self, filter_id: &str, value: &str) -> Option<String> {
        match filter_id {
            "locale" => self
                .locales()
                .iter()
                .find(|(code, _)| code.eq_ignore_ascii_case(value))
                .map(|(_, name)| name.clone()),
            "includeRetired" => match value {
                "true" => Some("Yes".to_string()),
                "false" => Some("No".to_string()),
                _ => None,
            },
            _ => None,
        }
    }
}


#[derive(Debug, Clone, Default)]
pub struct StaticReferenceData {
    pub concept_classes: Vec<String>,
    pub datatypes: Vec<String>,
    pub locales: Vec<(String, String)>,
}

impl StaticReferenceData {
    pub fn standard() -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            concept_classes: owned(&[
                "Diagnosis", "Symptom", "Finding", "Symptom/Finding", "Test", "Procedure", "Drug",
                "Question", "LabSet", "ConvSet", "Anatomy", "Program", "Workflow", "Misc",
            ]),
            datatypes: owned(&[
                "Numeric", "Coded", "Text", "N/A", "Document", "Date", "Time", "Datetime",
                "Boolean", "Rule", "Structured-Numeric", "Complex",
            ]),
            locales: [
                ("en", "English"),
                ("es", "Spanish"),
                ("fr", "French"),
                ("pt", "Portuguese"),
                ("de", "German"),
                ("it", "Italian"),
                ("ru", "Russian"),
                ("sw", "Swahili"),
                ("ar", "Arabic"),
                ("zh", "Chinese"),
                ("hi", "Hindi"),
            ]
            .into_iter()
            .map(|(code, name)| (code.to_string(), name.to_string()))
            .collect(),
        }
    }
}

impl ReferenceData for StaticReferenceData {
    fn concept_classes(&self) -> &[String] {
        &self.concept_classes
    }

    fn datatypes(&self) -> &[String] {
        &self.datatypes
    }

    fn locales(&self) -> &[(String, String)] {
        &self.locales
    }
}

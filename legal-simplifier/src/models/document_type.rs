use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of the pasted legal text, used only to tailor the prompt wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DocumentType {
    #[default]
    #[serde(rename = "Terms of Service")]
    TermsOfService,
    #[serde(rename = "Privacy Policy")]
    PrivacyPolicy,
    #[serde(rename = "Sales Agreement")]
    SalesAgreement,
    #[serde(rename = "NDA")]
    Nda,
    #[serde(rename = "Other")]
    Other,
}

impl DocumentType {
    /// All choices, in selector order.
    pub const ALL: [DocumentType; 5] = [
        DocumentType::TermsOfService,
        DocumentType::PrivacyPolicy,
        DocumentType::SalesAgreement,
        DocumentType::Nda,
        DocumentType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::TermsOfService => "Terms of Service",
            DocumentType::PrivacyPolicy => "Privacy Policy",
            DocumentType::SalesAgreement => "Sales Agreement",
            DocumentType::Nda => "NDA",
            DocumentType::Other => "Other",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

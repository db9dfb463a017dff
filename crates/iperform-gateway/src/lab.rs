//! Typed result of the virtual-lab advisor.

use iperform_core::serde::{lenient_string, lenient_string_vec};
use serde::{Deserialize, Serialize};

/// Readings the advisor reports for the current experiment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabMeasurements {
    #[serde(default, deserialize_with = "lenient_string")]
    pub temperature: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ph: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub voltage: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub other: String,
}

/// One round of lab simulation feedback.
///
/// `status` is one of `SAFE`, `CAUTION`, `DANGER`, `CRITICAL` when the
/// advisor follows its brief.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabReport {
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub observation: String,
    #[serde(default)]
    pub measurements: LabMeasurements,
    #[serde(default, deserialize_with = "lenient_string")]
    pub safety_assessment: String,
    #[serde(default, deserialize_with = "lenient_string_vec")]
    pub next_steps: Vec<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub theory: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_report_decodes() {
        let report: LabReport = serde_json::from_value(json!({
            "status": "CAUTION",
            "observation": "The mixture fizzes.",
            "nextSteps": ["Ventilate", 2]
        }))
        .unwrap();
        assert_eq!(report.status, "CAUTION");
        assert_eq!(report.measurements, LabMeasurements::default());
        assert_eq!(report.next_steps, vec!["Ventilate", "2"]);
    }
}

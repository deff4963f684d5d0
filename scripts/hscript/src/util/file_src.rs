use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use anyhow::Context;
use hholiday::{store::HolidaySrc, Holiday};

// -----------------------------------------------------------------------------
// FileData
// -----------------------------------------------------------------------------
/// Accepted layouts of a holiday file.
///
/// Records are kept as raw values so a bad record does not reject the file.
#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
enum FileData {
    /// `[{...}, ...]`
    List(Vec<serde_json::Value>),
    /// Response of the list API, `{"success": true, "data": [...]}`
    Envelope { data: Vec<serde_json::Value> },
    /// `{"<institution id>": [...], ...}`
    ByInstitution(HashMap<String, Vec<serde_json::Value>>),
}

/// Parse each record on its own. Records which are not holidays are logged and skipped.
fn parse_records(path: &Path, records: Vec<serde_json::Value>) -> Vec<Holiday> {
    records
        .into_iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let id = record
                .get("id")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("?")
                .to_owned();
            match serde_json::from_value::<Holiday>(record) {
                Ok(h) => Some(h),
                Err(e) => {
                    log::warn!("Skipped record #{i} (id: {id}) of {path:?}: {e}");
                    None
                }
            }
        })
        .collect()
}

// -----------------------------------------------------------------------------
// JsonFileSrc
// -----------------------------------------------------------------------------
/// [`HolidaySrc`] reading a JSON file on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSrc {
    path: PathBuf,
}

impl JsonFileSrc {
    pub fn new(path: impl AsRef<Path>) -> Self {
        JsonFileSrc {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl HolidaySrc for JsonFileSrc {
    fn list_holidays(&self, institution_id: &str) -> anyhow::Result<Vec<Holiday>> {
        let file = std::fs::File::open(&self.path)
            .with_context(|| format!("open holiday file {:?}", self.path))?;
        let data: FileData = serde_json::from_reader(std::io::BufReader::new(file))
            .with_context(|| {
                format!(
                    "parse holiday file {:?}. Expected an array of holidays, \
                     {{\"data\": [...]}} or an object of arrays keyed by institution",
                    self.path
                )
            })?;

        let records = match data {
            FileData::List(records) | FileData::Envelope { data: records } => {
                if !institution_id.is_empty() {
                    log::debug!(
                        "{:?} is not split by institution. '{institution_id}' is ignored",
                        self.path
                    );
                }
                records
            }
            FileData::ByInstitution(mut map) => map.remove(institution_id).with_context(|| {
                let mut known = map.keys().cloned().collect::<Vec<_>>();
                known.sort();
                format!(
                    "institution '{institution_id}' is not found in {:?}. Known: {}",
                    self.path,
                    known.join(", ")
                )
            })?,
        };
        Ok(parse_records(&self.path, records))
    }
}

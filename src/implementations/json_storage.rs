use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use serde_json::ser::PrettyFormatter;
use serde_json::{ Map, Value };
use std::cell::RefCell;
use std::fs;
use std::path::{ Path, PathBuf };

use crate::config::AgendaConfig;
use crate::errors::{ AgendaError, AgendaResult };
use crate::models::record::SoftwareRecord;
use crate::traits::InventoryStorage;

/// On-disk document: `{ "softwares": [...] }`
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InventoryDocument {
    #[serde(default)]
    pub softwares: Vec<SoftwareRecord>,

    /// Top-level keys other than `softwares`, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Inventory kept in a JSON file, with a read-only seed used until the first save
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_path: PathBuf,
    seed_path: Option<PathBuf>,
    /// Top-level keys of the last document loaded
    document_extra: RefCell<Map<String, Value>>,
}

impl JsonFileStorage {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self { data_path: data_path.into(), seed_path: None, document_extra: RefCell::default() }
    }

    pub fn with_seed(mut self, seed_path: impl Into<PathBuf>) -> Self {
        self.seed_path = Some(seed_path.into());
        self
    }

    pub fn from_config(config: &AgendaConfig) -> Self {
        Self::new(&config.data_file).with_seed(&config.seed_file)
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    fn read_records(&self, path: &Path) -> AgendaResult<Vec<SoftwareRecord>> {
        let contents = fs::read_to_string(path).map_err(|source| AgendaError::Storage {
            path: path.to_path_buf(),
            source,
        })?;
        let document: InventoryDocument = serde_json::from_str(&contents)?;
        *self.document_extra.borrow_mut() = document.extra;
        Ok(document.softwares)
    }
}

impl InventoryStorage for JsonFileStorage {
    fn load(&self) -> AgendaResult<Vec<SoftwareRecord>> {
        if self.data_path.exists() {
            debug!("Loading inventory from {}", self.data_path.display());
            return self.read_records(&self.data_path);
        }

        if let Some(seed) = self.seed_path.as_deref().filter(|p| p.exists()) {
            info!("{} not found, loading seed inventory {}", self.data_path.display(), seed.display());
            return self.read_records(seed);
        }

        info!("No inventory file found, starting empty");
        Ok(Vec::new())
    }

    fn save(&self, records: &[SoftwareRecord]) -> AgendaResult<()> {
        #[derive(Serialize)]
        struct DocumentRef<'a> {
            softwares: &'a [SoftwareRecord],
            #[serde(flatten)]
            extra: &'a Map<String, Value>,
        }

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        let extra = self.document_extra.borrow();
        DocumentRef { softwares: records, extra: &extra }.serialize(&mut serializer)?;

        fs::write(&self.data_path, buffer).map_err(|source| AgendaError::Storage {
            path: self.data_path.clone(),
            source,
        })?;
        debug!("Saved {} record(s) to {}", records.len(), self.data_path.display());
        Ok(())
    }
}

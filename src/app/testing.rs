//! In-memory store used by the unit tests.

use std::cell::RefCell;

use crate::app::api::ConfigStore;
use crate::app::error::StoreError;
use crate::app::types::ScheduleConfig;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Load,
    Save(ScheduleConfig),
    Add(Vec<String>),
    Remove(String),
}

/// Records every call. `add_file_targets` answers with `add_response` when set,
/// otherwise merges into `targets` the way the host does (append unseen paths).
#[derive(Default)]
pub struct RecordingStore {
    pub config: RefCell<ScheduleConfig>,
    pub targets: RefCell<Vec<String>>,
    pub add_response: RefCell<Option<Vec<String>>>,
    pub fail_with: RefCell<Option<String>>,
    pub calls: RefCell<Vec<Call>>,
}

impl RecordingStore {
    pub fn with_config(config: ScheduleConfig) -> Self {
        let store = Self::default();
        *store.targets.borrow_mut() = config.file_targets.clone();
        *store.config.borrow_mut() = config;
        store
    }

    pub fn failing(message: &str) -> Self {
        let store = Self::default();
        *store.fail_with.borrow_mut() = Some(message.to_string());
        store
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn removes(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Remove(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }

    fn check(&self, command: &'static str) -> Result<(), StoreError> {
        match self.fail_with.borrow().as_ref() {
            Some(message) => Err(StoreError::Rejected { command, message: message.clone() }),
            None => Ok(()),
        }
    }
}

impl ConfigStore for RecordingStore {
    async fn load_config(&self) -> Result<ScheduleConfig, StoreError> {
        self.calls.borrow_mut().push(Call::Load);
        self.check("load_config_for_frontend")?;
        Ok(self.config.borrow().clone())
    }

    async fn save_config(&self, config: &ScheduleConfig) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(Call::Save(config.clone()));
        self.check("save_config")?;
        *self.config.borrow_mut() = config.clone();
        Ok(())
    }

    async fn add_file_targets(&self, paths: Vec<String>) -> Result<Vec<String>, StoreError> {
        self.calls.borrow_mut().push(Call::Add(paths.clone()));
        self.check("add_file_targets")?;
        if let Some(response) = self.add_response.borrow().clone() {
            return Ok(response);
        }
        let mut targets = self.targets.borrow_mut();
        for path in paths {
            if !targets.contains(&path) {
                targets.push(path);
            }
        }
        Ok(targets.clone())
    }

    async fn remove_file_target(&self, path: String) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(Call::Remove(path.clone()));
        self.check("remove_file_target")?;
        self.targets.borrow_mut().retain(|p| p != &path);
        Ok(())
    }
}

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::{JobRepository, TextGenerator};
use crate::application::services::{AssemblyMessage, AssignmentService};
use crate::presentation::config::Settings;

pub struct AppState<G: TextGenerator> {
    pub assignment_service: Arc<AssignmentService<G>>,
    pub job_repository: Arc<dyn JobRepository>,
    pub assembly_sender: mpsc::Sender<AssemblyMessage>,
    pub settings: Settings,
}

impl<G: TextGenerator> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            assignment_service: Arc::clone(&self.assignment_service),
            job_repository: Arc::clone(&self.job_repository),
            assembly_sender: self.assembly_sender.clone(),
            settings: self.settings.clone(),
        }
    }
}

//! Shared application state for the HTTP layer.

use std::sync::Arc;

use crate::application::handlers::academic::{
    CreateElectiveCycleHandler, DeleteElectiveCycleHandler, DisableElectiveCycleHandler,
    GetElectiveCycleHandler, ListElectiveCyclesHandler,
};
use crate::application::handlers::establishment::{
    CreateInstitutionHandler, ListInstitutionsHandler, PropagateElectiveCycleHandler,
};
use crate::ports::{ElectiveCycleRepository, InstitutionRepository};

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct SchoolAppState {
    pub cycle_repository: Arc<dyn ElectiveCycleRepository>,
    pub institution_repository: Arc<dyn InstitutionRepository>,
}

impl SchoolAppState {
    pub fn new(
        cycle_repository: Arc<dyn ElectiveCycleRepository>,
        institution_repository: Arc<dyn InstitutionRepository>,
    ) -> Self {
        Self {
            cycle_repository,
            institution_repository,
        }
    }

    pub fn create_elective_cycle_handler(&self) -> CreateElectiveCycleHandler {
        CreateElectiveCycleHandler::new(self.cycle_repository.clone())
    }

    pub fn disable_elective_cycle_handler(&self) -> DisableElectiveCycleHandler {
        DisableElectiveCycleHandler::new(self.cycle_repository.clone())
    }

    pub fn delete_elective_cycle_handler(&self) -> DeleteElectiveCycleHandler {
        DeleteElectiveCycleHandler::new(
            self.cycle_repository.clone(),
            self.institution_repository.clone(),
        )
    }

    pub fn get_elective_cycle_handler(&self) -> GetElectiveCycleHandler {
        GetElectiveCycleHandler::new(self.cycle_repository.clone())
    }

    pub fn list_elective_cycles_handler(&self) -> ListElectiveCyclesHandler {
        ListElectiveCyclesHandler::new(self.cycle_repository.clone())
    }

    pub fn propagate_elective_cycle_handler(&self) -> PropagateElectiveCycleHandler {
        PropagateElectiveCycleHandler::new(
            self.cycle_repository.clone(),
            self.institution_repository.clone(),
        )
    }

    pub fn create_institution_handler(&self) -> CreateInstitutionHandler {
        CreateInstitutionHandler::new(
            self.cycle_repository.clone(),
            self.institution_repository.clone(),
        )
    }

    pub fn list_institutions_handler(&self) -> ListInstitutionsHandler {
        ListInstitutionsHandler::new(self.institution_repository.clone())
    }
}

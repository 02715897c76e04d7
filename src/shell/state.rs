use crate::modules::time_entries::core::ports::TimeEntryRepository;
use crate::modules::time_entries::use_cases::create_time_entry::handler::CreateTimeEntryHandler;
use crate::modules::time_entries::use_cases::delete_time_entry::handler::DeleteTimeEntryHandler;
use crate::modules::time_entries::use_cases::get_time_entry::handler::GetTimeEntryHandler;
use crate::modules::time_entries::use_cases::list_time_entries::handler::ListTimeEntriesHandler;
use crate::modules::time_entries::use_cases::partial_update_time_entry::handler::PartialUpdateTimeEntryHandler;
use crate::modules::time_entries::use_cases::update_time_entry::handler::UpdateTimeEntryHandler;
use crate::shared::infrastructure::http::EntityAlerts;
use std::sync::Arc;

pub const ENTITY_NAME: &str = "timeEntry";

type Repository = dyn TimeEntryRepository;

#[derive(Clone)]
pub struct AppState {
    pub alerts: EntityAlerts,
    pub create_handler: Arc<CreateTimeEntryHandler<Repository>>,
    pub update_handler: Arc<UpdateTimeEntryHandler<Repository>>,
    pub partial_update_handler: Arc<PartialUpdateTimeEntryHandler<Repository>>,
    pub list_handler: Arc<ListTimeEntriesHandler<Repository>>,
    pub get_handler: Arc<GetTimeEntryHandler<Repository>>,
    pub delete_handler: Arc<DeleteTimeEntryHandler<Repository>>,
}

impl AppState {
    pub fn new(application_name: impl Into<String>, repository: Arc<Repository>) -> Self {
        Self {
            alerts: EntityAlerts::new(application_name, ENTITY_NAME),
            create_handler: Arc::new(CreateTimeEntryHandler::new(repository.clone())),
            update_handler: Arc::new(UpdateTimeEntryHandler::new(repository.clone())),
            partial_update_handler: Arc::new(PartialUpdateTimeEntryHandler::new(
                repository.clone(),
            )),
            list_handler: Arc::new(ListTimeEntriesHandler::new(repository.clone())),
            get_handler: Arc::new(GetTimeEntryHandler::new(repository.clone())),
            delete_handler: Arc::new(DeleteTimeEntryHandler::new(repository)),
        }
    }
}

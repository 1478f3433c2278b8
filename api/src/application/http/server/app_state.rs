use std::sync::Arc;

use larder_core::application::LarderService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LarderService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LarderService) -> Self {
        Self { args, service }
    }
}

use crate::domain::{
    common::entities::app_errors::CoreError, recipe::policies::GenerationAccess,
};

#[derive(Debug, Clone)]
pub struct LarderPolicy {
    pub(crate) generation_access: GenerationAccess,
}

impl LarderPolicy {
    pub fn new(generation_access: GenerationAccess) -> Self {
        Self { generation_access }
    }

    pub fn generation_access(&self) -> GenerationAccess {
        self.generation_access
    }
}

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    match result_has_permission {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(error_message.to_string())),
        Err(e) => Err(e),
    }
}

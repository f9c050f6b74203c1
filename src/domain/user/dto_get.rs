use crate::shared::PageRequest;

#[derive(Debug, Clone, Copy)]
pub struct GetWorkersDto {
    pub page: PageRequest,
}

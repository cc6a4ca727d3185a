pub mod dashboard_dto;
pub mod request;
pub mod response;

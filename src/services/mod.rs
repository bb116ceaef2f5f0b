pub mod display_service;
pub mod notification_service;
pub mod price_service;
pub mod purchase_service;

pub mod api_client;
pub mod colors;
pub mod components;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod resource;
pub mod storage;
pub mod toast;

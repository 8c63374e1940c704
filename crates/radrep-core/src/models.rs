pub mod catalog;
pub mod mammography;
pub mod modality;
pub mod report;
pub mod template;

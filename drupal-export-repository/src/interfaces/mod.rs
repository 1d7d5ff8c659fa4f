mod content_repository;

pub use content_repository::ContentRepository;

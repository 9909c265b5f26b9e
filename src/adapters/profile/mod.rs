//! Profile adapters for storage

mod document_repository;

pub use document_repository::DocumentProfileRepository;

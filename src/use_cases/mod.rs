pub mod check_live;
pub mod places;
pub mod token_cache;


pub use check_live::CheckLiveUseCase;
pub use token_cache::CredentialCache;

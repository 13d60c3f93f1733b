pub mod get_history;

pub use get_history::GetHistoryUseCase;

// In-memory collections owned by the app state
mod id;
mod info_board;
mod rental_repo;

pub use id::IdGenerator;
pub use info_board::InfoBoard;
pub use rental_repo::RentalRepository;

pub mod memory;
pub mod traits;

// Re-export
pub use memory::MemoryWorkoutRepository;
pub use traits::WorkoutRepository;

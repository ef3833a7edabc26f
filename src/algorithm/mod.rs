/// Ordering shreds by walking neighbor claims
pub mod chain;
/// Best-neighbor selection and photo edge detection
pub mod neighbors;
/// Orchestration of a full reconstruction
pub mod pipeline;
/// Reassembly of ordered shreds into an image
pub mod reconstruct;
/// Pairwise border dissimilarity scores
pub mod scores;
/// Generating shuffled inputs from intact images
pub mod shuffle;
/// Cutting images into vertical shreds
pub mod slicer;

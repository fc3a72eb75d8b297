// Ready-made transfer functions.
// Good starting points for the synthetic fields,
// real datasets need functions tuned to their intensities.

pub mod transfer_functions;

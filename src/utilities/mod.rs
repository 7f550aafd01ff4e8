pub mod scale_math;

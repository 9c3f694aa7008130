pub mod self_petition;

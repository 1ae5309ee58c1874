// Service module exports

pub mod adapter;
pub mod dispatcher;
pub mod focus;
pub mod scheduler;
pub mod selection;
pub mod view;

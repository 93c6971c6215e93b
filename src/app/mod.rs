// Application layer: composition that sits above the core gateways.

pub mod view;

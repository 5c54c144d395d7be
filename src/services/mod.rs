// Module exports for services

pub mod countdown;

#![no_std]

mod contract;
mod events;
mod factory;
mod interface;
mod storage;
mod utils;

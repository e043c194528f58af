#![no_std]

mod allowance;
mod balance;
mod contract;
mod controller;
mod events;
mod interface;
mod math;
mod roles;
mod storage;
mod strategy;

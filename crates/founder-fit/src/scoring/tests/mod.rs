mod common;
mod composite;
mod coverage;
mod team;

mod brackets;
mod common;
mod guard;
mod rebate;

//! Rail-fan route planning chat bot.
//!
//! A LINE bot that walks a user through a travel query one question at a
//! time, then searches the Ekispert routing API for itineraries that
//! maximize time spent on board, filtered to the user's chosen operator
//! and line.

pub mod bot;
pub mod domain;
pub mod ekispert;
pub mod line;
pub mod planner;
pub mod session;
pub mod web;

#![allow(warnings)]
//! Chasene Board Entry Point

mod models;
mod ids;
mod seed;
mod derived;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

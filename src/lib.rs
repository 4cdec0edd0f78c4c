#[allow(non_snake_case)]
pub mod Ckin;
#[allow(non_snake_case)]
pub mod Utils;
pub mod phycon;
pub mod settings;

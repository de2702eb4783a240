//! Wire types shared between the setup form and the backend

pub mod usecases;

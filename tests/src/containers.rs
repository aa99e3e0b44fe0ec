mod identity;
mod integration;

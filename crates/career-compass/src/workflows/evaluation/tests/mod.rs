mod common;
mod jobs;
mod normalize;
mod service;
mod tools;

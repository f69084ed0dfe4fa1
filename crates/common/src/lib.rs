pub mod environment;
mod environment_variables;

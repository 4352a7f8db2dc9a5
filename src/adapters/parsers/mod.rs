pub mod dotenv_parser;

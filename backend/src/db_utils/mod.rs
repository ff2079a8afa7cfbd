pub mod mongo_utils;

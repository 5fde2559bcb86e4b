pub mod request_error;

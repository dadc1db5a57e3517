mod test_error_without_close_keeps_record;
mod test_handshake_payload_passthrough;

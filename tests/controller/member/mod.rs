mod update_status;

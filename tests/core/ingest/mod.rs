// Directory ingestion and configuration tests

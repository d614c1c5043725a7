pub mod upload_orchestrator;

mod partitioner_tests;
mod provider_tests;

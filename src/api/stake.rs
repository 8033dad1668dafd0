pub mod delegations;

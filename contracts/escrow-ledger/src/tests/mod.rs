mod test_delegation;

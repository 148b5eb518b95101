mod duty;

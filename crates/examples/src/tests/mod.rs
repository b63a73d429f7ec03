mod focusgym;

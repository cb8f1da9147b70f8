/*!
# `GOTO <line number>`

## Purpose
Continue the program at another line.

## Remarks
The target is looked up only when the `GOTO` executes, so a program
that jumps to a missing line loads fine and then stops with
`UNDEFINED LINE`. Line numbers must match exactly; there is no
rounding to the next line.

Without `END`, the last line of the program is the only way out.
Jumping backwards makes a loop that keeps running until CTRL-C
breaks it.

## Example
```text
10 LET N=1
20 GOTO 40
30 PRINT "SKIPPED"
40 PRINT "N=";N
```

*/
